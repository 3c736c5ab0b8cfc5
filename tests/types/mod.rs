mod structured_error;
