mod time_entry_set;
