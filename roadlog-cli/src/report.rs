//! Plain-text log sheets.
//!
//! One block per day: every timeline segment as a clock range, then the
//! per-status totals. Fuel stops, rest breaks and trip statistics follow the
//! last day.

use std::io::{self, Write};

use roadlog_core::{DayRecord, DutyStatus, TripPlan, TripSchedule, hours_to_hhmm};

use crate::output::write_json;
use crate::{CliError, OutputFormat};

/// Write `schedule` in the requested format.
pub(crate) fn write_schedule(
    writer: &mut dyn Write,
    schedule: &TripSchedule,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, schedule),
        OutputFormat::Text => schedule_sheet(writer, schedule).map_err(CliError::WriteReport),
    }
}

/// Write `plan` in the requested format.
pub(crate) fn write_plan(
    writer: &mut dyn Write,
    plan: &TripPlan,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, plan),
        OutputFormat::Text => plan_sheet(writer, plan).map_err(CliError::WriteReport),
    }
}

fn plan_sheet(out: &mut dyn Write, plan: &TripPlan) -> io::Result<()> {
    writeln!(
        out,
        "Driver: {}    Carrier: {}",
        plan.meta.driver_name, plan.meta.carrier_name
    )?;
    writeln!(out, "From:    {}", plan.locations.start.name)?;
    writeln!(out, "Pickup:  {}", plan.locations.pickup.name)?;
    writeln!(out, "Dropoff: {}", plan.locations.dropoff.name)?;
    writeln!(
        out,
        "Route:   {:.1} mi, {:.1} h estimated drive time",
        plan.route.distance_mi,
        plan.route.duration_s / 3600.0
    )?;
    writeln!(out)?;
    schedule_sheet(out, &plan.schedule)
}

fn schedule_sheet(out: &mut dyn Write, schedule: &TripSchedule) -> io::Result<()> {
    let stats = &schedule.trip_stats;
    writeln!(
        out,
        "Trip: {} mi over {} day(s), {:.1} h driving at {} mph",
        stats.total_miles, stats.trip_days, stats.total_driving_hrs, stats.avg_speed_mph
    )?;
    writeln!(
        out,
        "Cycle: {:.1} h used at start, {:.1} h remaining",
        stats.cycle_used_start, stats.cycle_remaining
    )?;
    if let Some(advisory) = &schedule.incomplete {
        writeln!(out, "Incomplete: {advisory}")?;
    }

    for day in &schedule.days {
        writeln!(out)?;
        day_sheet(out, day)?;
    }

    if !schedule.fuel_stops.is_empty() {
        writeln!(out)?;
        writeln!(out, "Fuel stops:")?;
        for stop in &schedule.fuel_stops {
            writeln!(
                out,
                "  Day {} at {}, {} mi ({:.0}% of trip)",
                stop.day,
                stop.time_str,
                stop.miles_in,
                stop.fraction * 100.0
            )?;
        }
    }
    if !schedule.rest_stops.is_empty() {
        writeln!(out)?;
        writeln!(out, "Rest breaks:")?;
        for stop in &schedule.rest_stops {
            writeln!(out, "  Day {} at {}, {} mi", stop.day, stop.time_str, stop.miles_in)?;
        }
    }
    Ok(())
}

fn day_sheet(out: &mut dyn Write, day: &DayRecord) -> io::Result<()> {
    writeln!(
        out,
        "Day {}: drove {:.2} h ({} mi), odometer {} mi",
        day.day_num, day.driven_hrs, day.driven_miles, day.cumulative_miles
    )?;
    for segment in &day.timeline {
        writeln!(
            out,
            "  {:>8} - {:>8}  {:<9} {}",
            hours_to_hhmm(segment.start),
            hours_to_hhmm(segment.end),
            segment.status,
            segment.note
        )?;
    }
    let totals = DutyStatus::ALL
        .iter()
        .map(|status| format!("{status} {:.2} h", day.totals.get(*status)))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "  Totals: {totals}")
}
