mod defaults;
