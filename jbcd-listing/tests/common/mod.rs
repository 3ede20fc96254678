/// `javap -c` output for
/// `static int sum(int[] values) { int total = 0; for (int v : values) total += v; return total; }`
/// followed by a call site.
pub const SUM_METHOD: &str = "\
  static int sum(int[]);
    Code:
       0: iconst_0
       1: istore_1
       2: aload_0
       3: astore_2
       4: aload_2
       5: arraylength
       6: istore_3
       7: iconst_0
       8: istore        4
      10: iload         4
      12: iload_3
      13: if_icmpge     33
      16: aload_2
      17: iload         4
      19: iaload
      20: istore        5
      22: iload_1
      23: iload         5
      25: iadd
      26: istore_1
      27: iinc          4, 1
      30: goto          10
      33: getstatic     #7                  // Field java/lang/System.out:Ljava/io/PrintStream;
      36: iload_1
      37: invokevirtual #13                 // Method java/io/PrintStream.println:(I)V
      40: iload_1
      41: ireturn
";
