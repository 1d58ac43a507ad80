mod source_tests;
