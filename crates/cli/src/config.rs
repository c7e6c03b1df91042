use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use donation_tally_engine::config::{Config, ConfigBuilder};
use donation_tally_engine::options as engine_options;
use donation_tally_engine::TallyOptions;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let tally = if args.capture_lines.is_empty() {
            TallyOptions::default()
        } else {
            TallyOptions::with_capture_lines(args.capture_lines.iter().map(|l| l.0))
        };

        let variant: engine_options::Variant = args.variant.into();

        let config = ConfigBuilder::default()
            .path(args.path)
            .variant(variant)
            .tally(tally)
            .batch_size(args.batch_size)
            .channel_capacity(args.channel_capacity)
            .build()
            .map_err(donation_tally_engine::error::EngineError::from)?;
        Ok(config)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::Variant,
    engine_options::Variant,
    Sequential,
    Pipelined
);
