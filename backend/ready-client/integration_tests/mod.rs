mod executor;
mod helpers;
mod lifecycle;
mod operations;
mod session;
