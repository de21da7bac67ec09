use tracing_subscriber::EnvFilter;

/// Инициализация логов: fmt-подписчик, фильтр из `RUST_LOG`, по умолчанию `info`.
///
/// Повторный вызов ничего не ломает – второй подписчик просто не ставится.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
