pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod http_client;
        pub mod session_store;
    }
}

pub mod modules {
    pub mod availability {
        pub mod core {
            pub mod ports;
            pub mod schedule;
            pub mod time_slot;
        }
        pub mod use_cases {
            pub mod generate_time_slots {
                pub mod generate;
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod backend;
                pub mod in_memory;
            }
        }
    }
    pub mod service_areas {
        pub mod core {
            pub mod geo;
            pub mod location;
            pub mod ports;
            pub mod postcode;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod resolve_service_area {
                pub mod handler;
                pub mod query;
                pub mod resolve;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod precheck_postcode_area {
                pub mod handler;
                pub mod precheck;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod backend;
                pub mod in_memory;
                pub mod postcodes_io;
            }
        }
    }
    pub mod session {
        pub mod use_cases {
            pub mod select_location {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_session {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
