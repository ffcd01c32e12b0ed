mod error;
mod register_request;
