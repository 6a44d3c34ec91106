//! Basic DRV8825 control example.
//!
//! Drives a set of host-side fake pins that print every level change, so the
//! pin sequence of each driver operation can be inspected without hardware.

use stepper_drv8825::{Direction, Drv8825, StepMode};

/// Delay provider backed by the host scheduler.
struct HostDelay;

impl embedded_hal::delay::DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Output pin that prints its writes.
struct PrintPin {
    name: &'static str,
}

impl embedded_hal::digital::ErrorType for PrintPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for PrintPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        println!("  {:<6} -> high", self.name);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        println!("  {:<6} -> low", self.name);
        Ok(())
    }
}

/// nFAULT input that never reports a fault.
struct HealthyFault;

impl embedded_hal::digital::ErrorType for HealthyFault {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for HealthyFault {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

fn pin(name: &'static str) -> PrintPin {
    PrintPin { name }
}

fn main() -> stepper_drv8825::Result<()> {
    println!("=== DRV8825 Example ===\n");

    println!("construct (1/8 step):");
    let mut driver = Drv8825::builder()
        .step_pin(pin("STEP"))
        .dir_pin(pin("DIR"))
        .enable_pin(pin("nENBL"))
        .reset_pin(pin("nRESET"))
        .sleep_pin(pin("nSLEEP"))
        .fault_pin(HealthyFault)
        .mode_pins(pin("MODE0"), pin("MODE1"), pin("MODE2"))
        .mode(StepMode::Eighth)
        .step_pulse_ns(2_000)
        .delay(HostDelay)
        .build()?;
    println!("state: {:?}\n", driver.state());

    println!("3 steps clockwise, 2 counter-clockwise:");
    for _ in 0..3 {
        driver.step(Direction::Clockwise)?;
    }
    for _ in 0..2 {
        driver.step(Direction::CounterClockwise)?;
    }

    println!("\nsleep, step (ignored), wake:");
    driver.sleep()?;
    let outcome = driver.step(Direction::CounterClockwise)?;
    println!("  step outcome: {:?}", outcome);
    driver.wake()?;

    println!("\nswitch to full step and reset indexer:");
    driver.set_mode(StepMode::Full)?;
    driver.reset()?;

    println!("\ndisable:");
    driver.disable()?;
    println!("state: {:?}", driver.state());

    Ok(())
}
