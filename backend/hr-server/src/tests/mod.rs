mod api;
mod bootstrap;
