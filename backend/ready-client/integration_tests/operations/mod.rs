mod employees;
mod time_entries;
