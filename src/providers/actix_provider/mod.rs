pub mod facade;
pub mod headers;
mod impls;
pub mod middleware;
