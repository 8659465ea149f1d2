pub mod external_tools;
