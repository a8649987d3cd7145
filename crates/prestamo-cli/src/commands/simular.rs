use clap::Args;
use rust_decimal::Decimal;

use prestamo_core::{simulate, LoanOutcome, LoanRequest, Periodicity};

use crate::input;

/// Arguments for a loan simulation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SimularArgs {
    /// Path to a JSON request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub cantidad: Option<Decimal>,

    /// Nominal annual rate as a fraction (0.05 = 5%)
    #[arg(long = "tipo-interes")]
    pub tipo_interes: Option<Decimal>,

    /// Term length, in units of --periodicidad
    #[arg(long)]
    pub plazo: Option<i64>,

    /// Term unit
    #[arg(long, value_enum, default_value = "meses")]
    pub periodicidad: PeriodicidadArg,

    /// Origination fee as a fraction of principal
    #[arg(long = "comision-apertura", default_value = "0")]
    pub comision_apertura: Decimal,

    /// Other up-front costs
    #[arg(long = "otros-gastos", default_value = "0")]
    pub otros_gastos: Decimal,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum PeriodicidadArg {
    Meses,
    Anios,
}

impl From<PeriodicidadArg> for Periodicity {
    fn from(arg: PeriodicidadArg) -> Self {
        match arg {
            PeriodicidadArg::Meses => Periodicity::Months,
            PeriodicidadArg::Anios => Periodicity::Years,
        }
    }
}

pub fn run_simular(args: SimularArgs) -> Result<LoanOutcome, Box<dyn std::error::Error>> {
    let request: LoanRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanRequest {
            principal: args
                .cantidad
                .ok_or("--cantidad is required (or provide --input)")?,
            nominal_annual_rate: args
                .tipo_interes
                .ok_or("--tipo-interes is required (or provide --input)")?,
            term: args
                .plazo
                .ok_or("--plazo is required (or provide --input)")?,
            periodicity: args.periodicidad.into(),
            origination_fee_rate: args.comision_apertura,
            other_costs: args.otros_gastos,
        }
    };

    Ok(simulate(&request)?)
}
