mod jmdict_tests;
