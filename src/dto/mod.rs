pub mod comparison_dto;
