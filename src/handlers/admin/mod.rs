pub mod products;

pub use products::set_tax_code_post;
