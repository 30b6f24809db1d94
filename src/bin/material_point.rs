use cmlaws::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "material_point",
    about = "Runs a material point simulation along a strain (or deformation gradient) path"
)]
struct Options {
    /// JSON file with the material parameters
    param_file: String,

    /// JSON file with the strain path
    path_file: String,

    /// Writes the results (all states) to this JSON file
    #[structopt(short, long)]
    output: Option<String>,

    /// Prints the states along the path
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let param = ParamMaterial::read_json(&options.param_file)?;
    let path = StrainPath::read_json(&options.path_file)?;
    let model = StressStrainModel::from_param(&param)?;

    // check dimensions
    let schema = model.actual.schema();
    if let Some(gradient) = path.gradients.first() {
        if gradient.dim() != schema.gradient.size {
            return Err("the gradients along the path are incompatible with the model");
        }
    }

    // run
    let states = path.follow(model.actual.as_ref(), options.verbose)?;

    // message
    let name = param.stress_strain.name();
    let thin_line = format!("{:─^1$}", "", 60);
    println!("\n{}", thin_line);
    println!("model: {} ({} increments)", name, path.gradients.len());
    if let Some(last) = states.last() {
        println!("final flux: {:?}", last.flux.as_data());
        for internal in &schema.internal {
            let values = last.internal(&schema, &internal.name)?;
            println!("final {}: {:?}", internal.name, values);
        }
    }

    // write results
    if let Some(out) = &options.output {
        let results = PathResults::new(name, &path, states);
        results.write_json(out)?;
        println!("results written to {}", out);
    }
    println!("{}\n", thin_line);
    Ok(())
}
