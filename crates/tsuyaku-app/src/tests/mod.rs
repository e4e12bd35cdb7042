mod bridge_tests;
