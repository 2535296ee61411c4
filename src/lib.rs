pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod mailer;
    }
}

pub mod modules {
    pub mod work_logs {
        pub mod core {
            pub mod month_interval;
            pub mod work_log;
            pub mod zone;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod generate_monthly_report {
                pub mod format;
                pub mod handler;
                pub mod report;
                pub mod request;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod email_monthly_report {
                pub mod command;
                pub mod compose;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod work_log_store;
                pub mod work_log_store_in_memory;
            }
        }
    }
}

pub mod shell;
