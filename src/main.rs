use stencil_conv::config::{load_config, DemoConfig};
use stencil_conv::diagnostics::{
    count_differences, max_abs_diff, ConvolutionReport, InputDescriptor, ParallelDescriptor,
    TimingBreakdown,
};
use stencil_conv::display::{PngViewer, ViewerSession};
use stencil_conv::image::io::{load_grayscale_image, write_json_file};
use stencil_conv::{ConvError, Evaluator};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConvError> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => DemoConfig::default(),
    };

    let kernel = config.kernel.build()?;
    let executor = config.parallel.build()?;
    let gray = load_grayscale_image(&config.input)?;
    let view = gray.as_view();

    let mut session = ViewerSession::new(PngViewer::new(&config.output.dir)?);
    session.show("Input", &gray)?;

    let mut timings = TimingBreakdown::default();
    let mut outputs = Vec::with_capacity(Evaluator::ALL.len());
    for evaluator in Evaluator::ALL {
        let out = timings.time(evaluator.label(), || {
            evaluator.run(&view, &kernel, &executor)
        })?;
        log::info!(
            "{} implementation: {:.3} ms",
            evaluator.label(),
            timings.get(evaluator.label()).unwrap_or_default()
        );
        session.show_and_wait(&format!("Output {}", evaluator.label()), &out)?;
        outputs.push(out);
    }
    session.finish()?;

    let (seq, par) = (&outputs[0], &outputs[1]);
    let report = ConvolutionReport {
        input: InputDescriptor {
            width: gray.width(),
            height: gray.height(),
            ksize: kernel.ksize(),
            kernel_sum: kernel.sum(),
        },
        parallel: ParallelDescriptor {
            partition: executor.partition(),
            threads: executor.threads(),
            chunk_len: executor.chunk_len(gray.width() * gray.height()),
        },
        timings,
        max_abs_diff: max_abs_diff(seq, par),
        differing_pixels: count_differences(seq, par),
    };
    log::info!(
        "sequential vs parallel: max |diff| = {:?}, differing pixels = {:?}",
        report.max_abs_diff,
        report.differing_pixels
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}
