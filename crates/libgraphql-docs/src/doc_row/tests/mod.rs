mod nav_stack_tests;
mod type_link_tests;
