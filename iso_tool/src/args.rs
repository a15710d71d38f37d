//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, ArgGroup, Command, ValueHint};
use isosurface_lib::premade::transfer_functions::TF_NAMES;

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn can_fit_u8(num: &str) -> Result<(), String> {
    let n = num.parse::<u8>();
    match n {
        Ok(_) => Ok(()),
        Err(_) => Err("Number does not fit in range <0;255>".into()),
    }
}

pub fn can_fit_u16(num: &str) -> Result<(), String> {
    let n = num.parse::<u16>();
    match n {
        Ok(_) => Ok(()),
        Err(_) => Err("Number does not fit in range <0;65535>".into()),
    }
}

pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if n > 0.0 {
                Ok(())
            } else {
                Err("Number must be greater than 0.0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_any_float(num: &str) -> Result<(), String> {
    match num.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err("Finite number required".into()),
    }
}

pub fn is_unit_interval(num: &str) -> Result<(), String> {
    match num.parse::<f32>() {
        Ok(n) if n > 0.0 && n <= 1.0 => Ok(()),
        Ok(_) => Err("Number must be in range (0;1>".into()),
        Err(_) => Err("Number required".into()),
    }
}

pub const GENERATOR_NAMES: &[&str] = &["sphere", "step", "ramp", "solid", "noise"];
pub const SYNTHETIC_NAMES: &[&str] = &["sphere", "step", "ramp"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("iso-tool")
        .author("Michal Majer")
        .version("0.1.0")
        .about("Iso-surface volume generator and renderer")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(render_command())
}

fn dims_arg<'a>() -> Arg<'a> {
    Arg::new("dims")
        .help("Dimensions of volume")
        .long("dims")
        .short('d')
        .number_of_values(3)
        .value_names(&["X", "Y", "Z"])
        .use_value_delimiter(true)
        .require_value_delimiter(true)
        .require_equals(true)
        .validator(is_positive_number)
}

fn output_arg<'a>(default: &'static str) -> Arg<'a> {
    Arg::new("output-file")
        .help("File name to output")
        .long("output-file")
        .short('o')
        .value_name("FILE")
        .allow_invalid_utf8(true)
        .value_hint(ValueHint::FilePath)
        .default_value_os(OsStr::new(default))
}

fn generate_command<'a>() -> Command<'a> {
    Command::new("generate")
        .about("Generate synthetic volume file")
        .arg(dims_arg().required(true))
        .arg(
            Arg::new("shape")
                .help("Shape of cell")
                .long("shape")
                .short('s')
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["1", "1", "1"])
                .validator(is_float_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("sample")
                .help("Value of generated object")
                .long("sample")
                .value_name("BYTE")
                .default_value("255")
                .validator(can_fit_u8),
        )
        .arg(
            Arg::new("radius")
                .help("Radius of sphere, relative to volume side")
                .long("radius")
                .value_name("R")
                .default_value("0.3")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(output_arg("a.vol"))
}

fn render_command<'a>() -> Command<'a> {
    Command::new("render")
        .about("Render iso-surface of volume into PNG image")
        .arg(
            Arg::new("volume")
                .help("Volume file to render")
                .long("volume")
                .short('v')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("synthetic")
                .help("Render generated volume instead of a file")
                .long("synthetic")
                .value_name("NAME")
                .possible_values(SYNTHETIC_NAMES),
        )
        .group(
            ArgGroup::new("source")
                .args(&["volume", "synthetic"])
                .required(true),
        )
        .arg(dims_arg().default_values(&["64", "64", "64"]))
        .arg(
            Arg::new("tf")
                .help("Transfer function")
                .long("tf")
                .value_name("NAME")
                .default_value("identity")
                .possible_values(TF_NAMES)
                .possible_value("step"),
        )
        .arg(
            Arg::new("resolution")
                .help("Resolution of image")
                .long("resolution")
                .short('r')
                .number_of_values(2)
                .value_names(&["W", "H"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["512", "512"])
                .validator(|s| is_positive_number(s).and(can_fit_u16(s))),
        )
        .arg(
            Arg::new("camera")
                .help("Camera position, volume spans <-0.5;0.5> on each axis")
                .long("camera")
                .short('c')
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .allow_hyphen_values(true)
                .default_values(&["1.2", "1.2", "1.2"])
                .validator(is_any_float),
        )
        .arg(
            Arg::new("threshold")
                .help("Iso value, compared with opacity from transfer function")
                .long("threshold")
                .short('t')
                .value_name("T")
                .default_value("0.15686275")
                .validator(is_unit_interval),
        )
        .arg(
            Arg::new("threads")
                .help("Number of render threads, leave out for one per core")
                .long("threads")
                .short('j')
                .value_name("N")
                .validator(is_positive_number),
        )
        .arg(output_arg("render.png"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validators() {
        assert!(is_positive_number("12").is_ok());
        assert!(is_positive_number("0").is_err());
        assert!(can_fit_u8("256").is_err());
        assert!(is_any_float("-2.5").is_ok());
        assert!(is_unit_interval("1").is_ok());
        assert!(is_unit_interval("0").is_err());
    }

    #[test]
    fn command_is_valid() {
        get_command().debug_assert();
    }

    #[test]
    fn render_requires_source() {
        let res = get_command().try_get_matches_from(["iso-tool", "render"]);
        assert!(res.is_err());
    }
}
