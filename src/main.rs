//! Demo binary that renders an animated gradient wave.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::DVec2;
use gradient_wave::color::LinearGradient;
use gradient_wave::mask::{MaskDirectory, MaskLibrary, MaskProvider};
use gradient_wave::options::Options;
use gradient_wave::scheduler::FrameClock;
use gradient_wave::{GradientWave, WaveError, WaveSurface};
use web_time::Instant;

const DEMO_MASK: &str = "heart_mask";
const FRAME_RATE: u32 = 60;
/// Give up after this much simulated time even if still animating.
const MAX_SIMULATED: Duration = Duration::from_secs(30);

struct Args {
    percent: i32,
    output: PathBuf,
    preset: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let percent = args
        .next()
        .ok_or_else(|| {
            "Usage: gradient-wave <percent> [out.svg] [preset.toml]".to_owned()
        })?
        .parse::<i32>()
        .map_err(|e| format!("percent must be an integer: {e}"))?;
    let output = args
        .next()
        .map_or_else(|| PathBuf::from("wave.svg"), PathBuf::from);
    let preset = args.next().map(PathBuf::from);
    Ok(Args {
        percent,
        output,
        preset,
    })
}

/// Masks from `GRADIENT_WAVE_MASKS` if set, otherwise a built-in size.
fn mask_provider() -> Box<dyn MaskProvider> {
    match std::env::var("GRADIENT_WAVE_MASKS") {
        Ok(dir) => Box::new(MaskDirectory::new(dir)),
        Err(_) => Box::new(MaskLibrary::new().with(DEMO_MASK, 120.0, 110.0)),
    }
}

fn svg_document(wave: &GradientWave) -> String {
    let frame = wave.frame();
    let LinearGradient {
        start,
        end,
        locations,
        from,
        to,
    } = *wave.gradient();
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            "  <defs>\n",
            "    <linearGradient id=\"fill\" gradientUnits=\"userSpaceOnUse\" ",
            "x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\">\n",
            "      <stop offset=\"{o1}\" stop-color=\"{c1}\" ",
            "stop-opacity=\"{a1}\"/>\n",
            "      <stop offset=\"{o2}\" stop-color=\"{c2}\" ",
            "stop-opacity=\"{a2}\"/>\n",
            "    </linearGradient>\n",
            "  </defs>\n",
            "  <path d=\"{d}\" fill=\"url(#fill)\"/>\n",
            "</svg>\n",
        ),
        w = frame.width(),
        h = frame.height(),
        x1 = from.x,
        y1 = from.y,
        x2 = to.x,
        y2 = to.y,
        o1 = locations[0],
        c1 = start.to_hex(),
        a1 = start.a(),
        o2 = locations[1],
        c2 = end.to_hex(),
        a2 = end.a(),
        d = wave.render_path().to_svg_data(),
    )
}

fn run(args: &Args) -> Result<(), WaveError> {
    let options = match &args.preset {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let masks = mask_provider();

    let mut clock = FrameClock::with_target_fps(FRAME_RATE);
    let mut wave =
        GradientWave::from_options(DVec2::ZERO, &options, DEMO_MASK, &*masks)?;
    let _ = wave.start(&clock);

    let t0 = Instant::now();
    let _ = wave.handle_frame(&clock.advance(t0));
    wave.set_percent(args.percent);

    let step = Duration::from_secs_f64(1.0 / f64::from(FRAME_RATE));
    let mut now = t0;
    let mut frames = 0u32;
    let mut last_logged = wave.percent();
    while wave.is_animating() && now.duration_since(t0) < MAX_SIMULATED {
        now += step;
        if !clock.should_render(now) {
            continue;
        }
        let _ = wave.handle_frame(&clock.advance(now));
        frames += 1;
        if wave.percent() / 10 != last_logged / 10 {
            log::info!(
                "t={:.3}s percent={}",
                now.duration_since(t0).as_secs_f64(),
                wave.percent()
            );
        }
        last_logged = wave.percent();
    }

    log::info!(
        "settled at {}% after {frames} frames ({:.1} fps)",
        wave.percent(),
        clock.fps()
    );
    let _ = wave.stop();

    write_svg(&args.output, &svg_document(&wave))
}

fn write_svg(path: &Path, svg: &str) -> Result<(), WaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
