pub mod simular;
