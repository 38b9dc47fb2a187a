mod glossa_tests;
