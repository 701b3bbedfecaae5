pub mod actions;
pub mod components;
pub mod js_functions;
