pub mod postgrest;
