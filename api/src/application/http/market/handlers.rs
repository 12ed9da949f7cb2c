pub mod get_produce_nearby;
