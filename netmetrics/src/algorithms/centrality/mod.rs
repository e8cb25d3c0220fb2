pub mod closeness_centrality;
