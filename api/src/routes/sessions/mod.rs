pub mod get_session_route;
