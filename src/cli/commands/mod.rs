mod config;
mod data;
mod demo;
mod filter;
mod report;
mod system;

use super::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in data::definitions()
        .into_iter()
        .chain(filter::definitions())
        .chain(report::definitions())
        .chain(demo::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
