pub mod shared {
    pub mod infrastructure {
        pub mod user_store;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod email_address;
            pub mod rules;
            pub mod user;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
            pub mod check_username {
                pub mod queries_port;
            }
        }
        pub mod service;
    }
}

pub mod shell;
