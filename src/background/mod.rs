pub mod visitor_pruner;
