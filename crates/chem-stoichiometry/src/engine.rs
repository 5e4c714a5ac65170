// Archivo: engine.rs
// Propósito: cálculo estequiométrico completo a partir de una reacción y
// dos entradas ya ordenadas como A/B.
use crate::result::{ExcessReagent, InputRecord, ProductFormed, SimulationResult};
use crate::trace::CalculationTrace;
use crate::units::convert_to_moles;
use chem_domain::{QuantityInput, Reaction, ReagentSide};

/// Calcula reactivo limitante, productos, exceso y rendimiento teórico.
///
/// `input_a` e `input_b` deben venir en el orden A/B de `reaction`; el
/// reordenamiento es responsabilidad del llamador. La función es pura: no
/// valida, no hace I/O y no guarda estado entre llamadas. Coeficientes o
/// masas molares no positivos producen ceros, infinitos o NaN que se
/// propagan tal cual.
pub fn calculate_stoichiometry(reaction: &Reaction, input_a: &QuantityInput, input_b: &QuantityInput) -> SimulationResult {
    log::debug!("calculando estequiometría de '{}' con A={} B={}",
                reaction.balanced_equation, input_a, input_b);
    let mut trace = CalculationTrace::new();
    let a = &reaction.reactant_a;
    let b = &reaction.reactant_b;

    // 1. moles
    let moles_a = convert_to_moles(input_a.quantity, &input_a.unit, a.molar_mass);
    let moles_b = convert_to_moles(input_b.quantity, &input_b.unit, b.molar_mass);
    trace.section("Step 1: Convert reactants to moles");
    trace.conversion(a, input_a.quantity, &input_a.unit, moles_a);
    trace.conversion(b, input_b.quantity, &input_b.unit, moles_b);

    // 2. razones de avance
    let ratio_a = moles_a / f64::from(a.coefficient);
    let ratio_b = moles_b / f64::from(b.coefficient);
    trace.section("Step 2: Calculate mole ratios");
    trace.ratio(a, moles_a, ratio_a);
    trace.ratio(b, moles_b, ratio_b);

    // 3. limitante; A gana los empates
    let limiting = if ratio_a <= ratio_b { ReagentSide::A } else { ReagentSide::B };
    let limiting_extent = propagating_min(ratio_a, ratio_b);
    trace.section("Step 3: Identify limiting reagent");
    trace.limiting(reaction.reactant(limiting), ratio_a == ratio_b);

    // 4. productos, en el orden de la reacción
    let mut products_formed = Vec::with_capacity(reaction.products.len());
    for product in &reaction.products {
        let moles = limiting_extent * f64::from(product.coefficient);
        let mass = moles * product.molar_mass;
        trace.product(product, limiting_extent, moles, mass);
        products_formed.push(ProductFormed { name: product.name.clone(),
                                             formula: product.formula.clone(),
                                             moles,
                                             mass,
                                             coefficient: product.coefficient });
    }

    // 5. exceso
    let excess_side = limiting.other();
    let excess = reaction.reactant(excess_side);
    let excess_moles = match excess_side {
        ReagentSide::A => moles_a,
        ReagentSide::B => moles_b,
    };
    let consumed = limiting_extent * f64::from(excess.coefficient);
    let leftover_moles = excess_moles - consumed;
    let leftover_mass = leftover_moles * excess.molar_mass;
    trace.section("Step 4: Calculate excess reagent");
    trace.excess(excess, excess_moles, consumed, leftover_moles, leftover_mass);

    // 6. rendimiento: suma de las mismas masas devueltas
    let theoretical_yield: f64 = products_formed.iter().map(|p| p.mass).sum();
    trace.section("Step 5: Theoretical yield");
    trace.total_yield(theoretical_yield);

    log::debug!("limitante {} ({}), rendimiento teórico {:.4} g",
                limiting, reaction.reactant(limiting).name, theoretical_yield);

    SimulationResult { reaction: reaction.clone(),
                       input_a: InputRecord { quantity: input_a.quantity, unit: input_a.unit.clone(), moles: moles_a },
                       input_b: InputRecord { quantity: input_b.quantity, unit: input_b.unit.clone(), moles: moles_b },
                       limiting_reagent: limiting,
                       excess_reagent: ExcessReagent { name: excess.name.clone(), leftover_moles, leftover_mass },
                       products_formed,
                       theoretical_yield,
                       calculation_steps: trace.finish() }
}

// f64::min descarta NaN; aquí debe propagarse.
fn propagating_min(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else {
        x.min(y)
    }
}
