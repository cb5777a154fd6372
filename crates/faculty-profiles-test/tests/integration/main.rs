//! End-to-end flows against a socket-bound mock of the profiles REST API.

mod helpers;

mod create_profile;
mod delete_profile;
mod update_profile;
mod uploads;
