mod property_substring;
