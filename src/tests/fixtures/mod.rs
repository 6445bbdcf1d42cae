pub mod commands {
    pub mod register_user;
}
