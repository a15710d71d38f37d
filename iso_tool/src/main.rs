/*
    iso_tool
    Author: Michal Majer
    Date: 2022-05-05
*/

use config::Config;

mod args;
mod config;
mod file;
mod generators;
mod header;
mod orders;
mod render;

use crate::{args::get_command, generators::generate_vol, render::render_to_file};

pub fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cmd = get_command();
    let args = cmd.get_matches();

    let cfg = match Config::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    log::debug!("{:?}", cfg);

    let res = match &cfg {
        Config::Generate(gen_cfg) => generate_vol(gen_cfg),
        Config::Render(render_cfg) => render_to_file(render_cfg),
    };

    if let Err(e) = res {
        log::error!("{e}");
        std::process::exit(1);
    }
}
