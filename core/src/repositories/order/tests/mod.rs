mod repository_tests;
