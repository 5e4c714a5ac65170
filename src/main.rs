use anyhow::Context;
use chem_domain::{DomainStubs, QuantityInput, QuantityUnit, ReactantSelection, ReactionCatalog};
use chem_playback::{ProgressSchedule, ReactionFrame};
use chem_stoichiometry::SimulationResult;
use chem_workflow::{SimulatorService, WorkflowConfig};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use uuid::Uuid;

/// Pequeño menú interactivo para simular reacciones usando el catálogo de
/// ejemplo y el historial configurado por entorno.
///
/// Opciones soportadas:
/// 1) Ver reacciones del catálogo
/// 2) Simular una reacción
/// 3) Ver historial
/// 4) Eliminar una simulación del historial
/// 5) Resumen del historial
/// 6) Salir
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WorkflowConfig::from_env().context("configuración inválida")?;
    let catalog = Arc::new(DomainStubs::sample_catalog().context("no se pudo crear el catálogo")?);
    log::info!("catálogo cargado: {} reactivos", catalog.unique_reactants()?.len());
    let svc = SimulatorService::with_config(catalog.clone(), config);

    loop {
        println!("\n== Simulador estequiométrico ==");
        println!("1) Ver reacciones");
        println!("2) Simular reacción");
        println!("3) Ver historial");
        println!("4) Eliminar simulación del historial");
        println!("5) Resumen");
        println!("6) Salir");
        let choice = match prompt("Elige una opción: ") {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!("\nFin de la entrada, saliendo...");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        match choice.trim() {
            "1" => match catalog.list_reactions() {
                Ok(reactions) => {
                    for r in reactions {
                        let dh = r.enthalpy_kj.map(|h| format!("ΔH = {} kJ", h)).unwrap_or_else(|| "-".into());
                        println!("{:<36} | {:<20} | {}", r.balanced_equation, r.reaction_type, dh);
                    }
                }
                Err(e) => eprintln!("Error listando reacciones: {}", e),
            },
            "2" => {
                if let Err(e) = run_simulation(&svc) {
                    eprintln!("{}", e);
                }
            }
            "3" => match svc.history() {
                Ok(records) if records.is_empty() => println!("Sin simulaciones todavía"),
                Ok(records) => {
                    println!("\nID                                   | FECHA                | ECUACIÓN                             | RENDIMIENTO");
                    println!("-------------------------------------------------------------------------------------------------------------");
                    for r in records {
                        println!("{} | {} | {:<36} | {:.4} g",
                                 r.id,
                                 r.created_at.format("%Y-%m-%d %H:%M:%S"),
                                 r.balanced_equation,
                                 r.theoretical_yield);
                    }
                }
                Err(e) => eprintln!("Error leyendo historial: {}", e),
            },
            "4" => {
                let id_s = prompt("Id de la simulación a eliminar (UUID): ")?;
                let id = match Uuid::parse_str(id_s.trim()) {
                    Ok(u) => u,
                    Err(_) => {
                        eprintln!("UUID inválido");
                        continue;
                    }
                };
                match svc.delete_history(&id) {
                    Ok(()) => println!("Simulación eliminada: {}", id),
                    Err(e) => eprintln!("Error eliminando simulación: {}", e),
                }
            }
            "5" => match svc.summary() {
                Ok(s) => {
                    println!("Simulaciones totales: {}", s.total_simulations);
                    println!("Reacciones distintas: {}", s.unique_reactions);
                    println!("Rendimiento total:    {:.2} g", s.total_yield);
                }
                Err(e) => eprintln!("Error calculando resumen: {}", e),
            },
            "6" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

fn run_simulation(svc: &SimulatorService) -> anyhow::Result<()> {
    println!("Reactivos: {}", svc.available_reactants()?.join(", "));
    let first = prompt("Reactivo A: ")?.trim().to_string();
    let compatible = svc.compatible_reactants(&first)?;
    if compatible.is_empty() {
        anyhow::bail!("No hay reacciones con {}", first);
    }
    println!("Compatibles: {}", compatible.join(", "));
    let second = prompt("Reactivo B: ")?.trim().to_string();
    let first_input = prompt_quantity(&first)?;
    let second_input = prompt_quantity(&second)?;

    let selection = ReactantSelection::new(first, first_input, second, second_input);
    let result = svc.simulate(&selection)?;
    play(svc, &result)?;
    print_result(&result);

    let answer = prompt("¿Guardar en el historial? (s/N): ")?;
    if matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes") {
        match svc.save(&result) {
            Ok(id) => println!("Simulación guardada: {}", id),
            Err(e) => eprintln!("Error guardando simulación: {}", e),
        }
    }
    Ok(())
}

fn prompt_quantity(name: &str) -> anyhow::Result<QuantityInput> {
    let q = prompt(&format!("Cantidad de {}: ", name))?;
    let quantity: f64 = q.trim().parse().with_context(|| format!("cantidad no numérica: '{}'", q.trim()))?;
    let u = prompt("Unidad (grams / moles / mL) [grams]: ")?;
    let unit = if u.trim().is_empty() { QuantityUnit::Grams } else { QuantityUnit::parse(&u) };
    Ok(QuantityInput::new(quantity, unit))
}

fn play(svc: &SimulatorService, result: &SimulationResult) -> io::Result<()> {
    let playback = svc.playback(result);
    let tick = playback.schedule().tick();
    for frame in playback.frames() {
        print_frame(&frame)?;
        if !ProgressSchedule::is_complete(frame.progress) {
            std::thread::sleep(tick);
        }
    }
    println!();
    Ok(())
}

fn print_frame(frame: &ReactionFrame) -> io::Result<()> {
    let filled = (frame.progress / 5.0).round() as usize;
    print!("\r[{:<20}] {:>3.0}%  A {:>5.1}%  B {:>5.1}%  productos {:>5.1}%{}",
           "#".repeat(filled),
           frame.progress,
           frame.reactant_a_remaining,
           frame.reactant_b_remaining,
           frame.product_formed,
           if frame.exothermic && frame.reacting { "  🔥" } else { "" });
    io::stdout().flush()
}

fn print_result(result: &SimulationResult) {
    let reaction = &result.reaction;
    println!("\n{}", reaction.balanced_equation);
    println!("{} ({}): {} {} = {:.4} mol",
             reaction.reactant_a.name, reaction.reactant_a.formula, result.input_a.quantity, result.input_a.unit, result.input_a.moles);
    println!("{} ({}): {} {} = {:.4} mol",
             reaction.reactant_b.name, reaction.reactant_b.formula, result.input_b.quantity, result.input_b.unit, result.input_b.moles);
    println!("Reactivo limitante: {}", result.limiting_reagent_name());
    for p in &result.products_formed {
        println!("  {:<20} {:<8} {:>10.4} mol {:>12.4} g", p.name, p.formula, p.moles, p.mass);
    }
    println!("Rendimiento teórico: {:.4} g", result.theoretical_yield);
    println!("Sobrante de {}: {:.4} mol ({:.4} g)",
             result.excess_reagent.name, result.excess_reagent.leftover_moles, result.excess_reagent.leftover_mass);
    if let Some(obs) = &reaction.observation {
        println!("Observación: {}", obs);
    }
    println!("\nPasos del cálculo:");
    for line in &result.calculation_steps {
        if line.starts_with("Step") {
            println!();
        }
        println!("  {}", line);
    }
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    read_answer(&mut io::stdin().lock())
}

// Entrada cerrada = UnexpectedEof, no una respuesta vacía.
fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "entrada cerrada"));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_answer_returns_lines_in_order() -> io::Result<()> {
        let mut input = io::Cursor::new("2\n\nZinc\n");
        assert_eq!(read_answer(&mut input)?, "2\n");
        // a blank line is still an answer
        assert_eq!(read_answer(&mut input)?, "\n");
        assert_eq!(read_answer(&mut input)?.trim(), "Zinc");
        Ok(())
    }

    #[test]
    fn closed_input_is_unexpected_eof() {
        let mut input = io::Cursor::new("6");
        assert!(read_answer(&mut input).is_ok());
        for _ in 0..3 {
            match read_answer(&mut input) {
                Err(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
                Ok(s) => panic!("expected UnexpectedEof, got {:?}", s),
            }
        }
        let mut empty = io::empty();
        assert!(matches!(read_answer(&mut empty), Err(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
