mod tables;

pub use tables::TablesCommands;
