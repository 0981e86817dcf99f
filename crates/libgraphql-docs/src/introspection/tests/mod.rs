mod introspection_type_ref_tests;
