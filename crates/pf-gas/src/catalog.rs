//! NASA-9 coefficient data for the built-in species.
//!
//! Coefficients, molecular weights and h(298.15 K) - h(0 K) values are taken
//! from McBride, Zehe and Gordon (2002), NASA/TP-2002-211556. Every built-in
//! species carries two ranges, 200-1000 K and 1000-6000 K.

use crate::nasa9::{SpeciesThermo, ThermoRange};
use crate::species::GasSpecies;

/// Temperature exponents of the NASA-9 cp form, shared by every range.
pub(crate) const NASA9_EXPONENTS: [f64; 7] = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0];

const AIR_MW: f64 = 28.965_115_9;
const AR_MW: f64 = 39.948;
const N2_MW: f64 = 28.0134;
const O2_MW: f64 = 31.9988;
const CO2_MW: f64 = 44.0095;
const H2O_MW: f64 = 18.015_28;

pub(crate) fn molar_mass(species: GasSpecies) -> f64 {
    match species {
        GasSpecies::Air => AIR_MW,
        GasSpecies::Ar => AR_MW,
        GasSpecies::N2 => N2_MW,
        GasSpecies::O2 => O2_MW,
        GasSpecies::CO2 => CO2_MW,
        GasSpecies::H2O => H2O_MW,
    }
}

/// Assemble a standard two-range table. `dh0` arrives in J/mol (as tabulated)
/// and is stored per unit mass.
fn two_range(
    name: &str,
    molec_weight: f64,
    dh0_j_per_mol: f64,
    low: [f64; 9],
    high: [f64; 9],
) -> SpeciesThermo {
    let dh0 = dh0_j_per_mol / molec_weight * 1000.0;
    SpeciesThermo::from_validated_parts(
        name,
        molec_weight,
        vec![200.0, 1000.0, 6000.0],
        vec![
            ThermoRange {
                coeffs: low,
                exponents: NASA9_EXPONENTS,
                dh0,
            },
            ThermoRange {
                coeffs: high,
                exponents: NASA9_EXPONENTS,
                dh0,
            },
        ],
    )
}

pub(crate) fn table(species: GasSpecies) -> SpeciesThermo {
    match species {
        GasSpecies::Air => two_range(
            "Air",
            AIR_MW,
            8_649.264,
            [
                1.009_950_160e+04,
                -1.968_275_610e+02,
                5.009_155_110e+00,
                -5.761_013_730e-03,
                1.066_859_930e-05,
                -7.940_297_970e-09,
                2.185_231_910e-12,
                -1.767_967_310e+02,
                -3.921_504_225e+00,
            ],
            [
                2.415_214_430e+05,
                -1.257_874_600e+03,
                5.144_558_670e+00,
                -2.138_541_790e-04,
                7.065_227_840e-08,
                -1.071_483_490e-11,
                6.577_800_150e-16,
                6.462_263_190e+03,
                -8.147_411_905e+00,
            ],
        ),
        GasSpecies::Ar => two_range(
            "Ar",
            AR_MW,
            6_197.428,
            [
                0.0,
                0.0,
                2.5,
                0.0,
                0.0,
                0.0,
                0.0,
                -7.453_750_000e+02,
                4.379_674_910e+00,
            ],
            [
                2.010_538_475e+01,
                -5.992_661_070e-02,
                2.500_069_401e+00,
                -3.992_141_160e-08,
                1.205_272_140e-11,
                -1.819_015_576e-15,
                1.078_576_636e-19,
                -7.449_939_610e+02,
                4.379_180_110e+00,
            ],
        ),
        GasSpecies::N2 => two_range(
            "N2",
            N2_MW,
            8_670.104,
            [
                2.210_371_497e+04,
                -3.818_461_820e+02,
                6.082_738_360e+00,
                -8.530_914_410e-03,
                1.384_646_189e-05,
                -9.625_793_620e-09,
                2.519_705_809e-12,
                7.108_460_860e+02,
                -1.076_003_744e+01,
            ],
            [
                5.877_124_060e+05,
                -2.239_249_073e+03,
                6.066_949_220e+00,
                -6.139_685_500e-04,
                1.491_806_679e-07,
                -1.923_105_485e-11,
                1.061_954_386e-15,
                1.283_210_415e+04,
                -1.586_640_027e+01,
            ],
        ),
        GasSpecies::O2 => two_range(
            "O2",
            O2_MW,
            8_680.104,
            [
                -3.425_563_420e+04,
                4.847_000_970e+02,
                1.119_010_961e+00,
                4.293_889_240e-03,
                -6.836_300_520e-07,
                -2.023_372_700e-09,
                1.039_040_018e-12,
                -3.391_454_870e+03,
                1.849_699_470e+01,
            ],
            [
                -1.037_939_022e+06,
                2.344_830_282e+03,
                1.819_732_036e+00,
                1.267_847_582e-03,
                -2.188_067_988e-07,
                2.053_719_572e-11,
                -8.193_467_050e-16,
                -1.689_010_929e+04,
                1.738_716_506e+01,
            ],
        ),
        GasSpecies::CO2 => two_range(
            "CO2",
            CO2_MW,
            9_365.469,
            [
                4.943_650_540e+04,
                -6.264_116_010e+02,
                5.301_725_240e+00,
                2.503_813_816e-03,
                -2.127_308_728e-07,
                -7.689_988_780e-10,
                2.849_677_801e-13,
                -4.528_198_460e+04,
                -7.048_279_440e+00,
            ],
            [
                1.176_962_419e+05,
                -1.788_791_477e+03,
                8.291_523_190e+00,
                -9.223_156_780e-05,
                4.863_676_880e-09,
                -1.891_053_312e-12,
                6.330_036_590e-16,
                -3.908_350_590e+04,
                -2.652_669_281e+01,
            ],
        ),
        GasSpecies::H2O => two_range(
            "H2O",
            H2O_MW,
            9_904.092,
            [
                -3.947_960_830e+04,
                5.755_731_020e+02,
                9.317_826_530e-01,
                7.222_712_860e-03,
                -7.342_557_370e-06,
                4.955_043_490e-09,
                -1.336_933_246e-12,
                -3.303_974_310e+04,
                1.724_205_775e+01,
            ],
            [
                1.034_972_096e+06,
                -2.412_698_562e+03,
                4.646_110_780e+00,
                2.291_998_307e-03,
                -6.836_830_480e-07,
                9.426_468_930e-11,
                -4.822_380_530e-15,
                -1.384_286_509e+04,
                -7.978_148_510e+00,
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nasa9::SpeciesThermo as Table;

    #[test]
    fn every_builtin_table_validates() {
        for species in GasSpecies::ALL {
            let built = table(species);
            let revalidated = Table::new(
                built.name().to_string(),
                built.molec_weight(),
                vec![built.t_min(), 1000.0, built.t_max()],
                vec![built.range(0).clone(), built.range(1).clone()],
            );
            assert!(revalidated.is_ok(), "catalog entry {:?} is invalid", species);
        }
    }

    #[test]
    fn air_molecular_weight() {
        assert!((table(GasSpecies::Air).molec_weight() - 28.965_115_9).abs() < 1e-7);
    }

    #[test]
    fn argon_low_range_coefficients() {
        let ar = table(GasSpecies::Ar);
        let expected = [0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 0.0, -745.375, 4.379_674_91];
        for (got, want) in ar.range(0).coeffs.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn dh0_is_stored_per_unit_mass() {
        let air = table(GasSpecies::Air);
        let expected = 8_649.264 / 28.965_115_9 * 1000.0;
        assert!((air.range(0).dh0 - expected).abs() < 1e-6);
    }
}
