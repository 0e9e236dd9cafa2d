use env_logger::{Builder, Env};
use log::error;

use snipdb::error::{to_exit_code, RegistryError};

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug snipdb list
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = snipdb::cli::run() {
        // Отказ реестра — понятное сообщение и свой код выхода.
        if let Some(re) = e.downcast_ref::<RegistryError>() {
            eprintln!("error: {}", re);
            std::process::exit(to_exit_code(re));
        }
        error!("{:?}", e);
        std::process::exit(1);
    }
}
