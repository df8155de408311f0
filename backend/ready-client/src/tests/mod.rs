mod config;
mod json_options;
