pub mod route_planner;
pub mod route_result;
