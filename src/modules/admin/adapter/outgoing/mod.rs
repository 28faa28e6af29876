pub mod admin_query_postgres;
