mod common;

mod invariants;
mod notice_of_proceedings;
mod on_demand;
mod routing;
mod service;
