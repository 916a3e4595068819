//! Critical sections for the single-core Cortex-A9
//!
//! Masking IRQs in the CPSR is enough while only one core runs the
//! firmware. FIQs are left alone; nothing in the firmware uses them.

#[cfg(target_arch = "arm")]
mod cortex_a9 {
    use core::arch::asm;

    use critical_section::RawRestoreState;

    /// CPSR I bit: IRQs masked
    const CPSR_IRQ_MASKED: u32 = 1 << 7;

    struct SingleCoreCriticalSection;

    critical_section::set_impl!(SingleCoreCriticalSection);

    unsafe impl critical_section::Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let cpsr: u32;
            // SAFETY: reading CPSR and masking IRQs has no memory effects;
            // the asm is a compiler barrier so accesses stay inside
            unsafe {
                asm!("mrs {}, cpsr", "cpsid i", out(reg) cpsr, options(nostack, preserves_flags));
            }
            // Report whether IRQs were enabled on entry
            cpsr & CPSR_IRQ_MASKED == 0
        }

        unsafe fn release(was_enabled: RawRestoreState) {
            if was_enabled {
                // SAFETY: only re-enables IRQs that were enabled on acquire
                unsafe {
                    asm!("cpsie i", options(nostack, preserves_flags));
                }
            }
        }
    }
}
