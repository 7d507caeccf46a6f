pub mod comparison_controller;
