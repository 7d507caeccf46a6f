pub mod comparison_routes;
