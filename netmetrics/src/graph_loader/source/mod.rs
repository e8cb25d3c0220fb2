pub mod adj_loader;
pub mod edge_list_loader;
