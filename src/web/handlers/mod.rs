// Route handlers. `form` serves the HTML page, `api` the JSON endpoint.

pub mod api;
pub mod form;
