pub mod assignment;
pub mod nearest_neighbor;
pub mod route_search;
pub mod search_params;
