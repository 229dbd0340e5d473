/*
Copyright (C) 2023 ErgLabs <dev@erglabs.org>.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

        http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

// stdout and stderr belong to the copy itself unless RUST_LOG asks for more
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
}

pub fn init_subscriber() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::Layer::default()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false)
                .with_line_number(true)
                .with_file(true),
        );
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
