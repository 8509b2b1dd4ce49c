mod cli_options;
